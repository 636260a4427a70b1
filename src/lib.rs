//! This crate fetches tournament schedules published through a Google Sheets feed.
//!
//! It provides a feed client in the [`client`] module that retrieves the raw
//! gviz payload, normalizes its loosely-typed rows into [`Tournament`] records,
//! and returns them as a [`Schedule`]: the filtered, date-sorted working set of
//! upcoming tournaments.
//!
//! A [`Schedule`] can then be projected any number of times through a
//! [`schedule::Filter`] (province and/or date), and rendered by anything that
//! implements [`traits::Frontend`]. \
//! A terminal front-end and an HTML exporter are provided in the [`console`]
//! and [`html`] modules.

pub mod traits;

pub mod gviz;
mod tournament;
pub use tournament::Tournament;
pub mod schedule;
pub use schedule::{Filter, Schedule};

pub mod client;
pub use client::Client;

pub mod console;
pub mod html;

pub mod config;
