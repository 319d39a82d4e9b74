//! Integration tests for ECFS-Scrape
//!
//! These tests run queries through the real HTTP fetcher against wiremock
//! servers serving canned ECFS pages.

mod query_tests;
