//! # Kundali Engine
//!
//! Vedic birth-chart HTTP service.
//!
//! This crate accepts a birth date/time/location, computes planetary
//! longitudes and the ascendant through an external ephemeris library,
//! buckets the grahas into the twelve houses of a kundali chart, and
//! serves the result as JSON or as a rendered PDF report.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: domain types (grahas, languages, chart styles, time)
//! - [`ephemeris`]: adapter over the `astro` ephemeris backend
//! - [`services`]: house bucketing, chart assembly, PDF rendering
//! - [`http`]: axum-based HTTP server and request handlers
//! - [`config`]: environment-driven server configuration

pub mod config;

pub mod ephemeris;
pub mod models;

pub mod services;

pub mod http;
