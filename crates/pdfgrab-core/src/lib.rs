//! Core of pdfgrab: a sequential batch downloader that saves only well-formed,
//! non-empty PDF responses under deterministic, filesystem-safe names.

pub mod config;
pub mod logging;

pub mod batch;
pub mod downloader;
pub mod fetch;
pub mod storage;
pub mod url_list;
pub mod url_model;
