//! PubMed paper fetcher
//!
//! Searches PubMed through the NCBI E-utilities API and reports papers that
//! have at least one author affiliated with a pharmaceutical or biotech
//! company.
//!
//! # Pipeline
//!
//! 1. `esearch` turns a query into PMIDs
//! 2. `efetch` returns the article records for those PMIDs
//! 3. each record is normalized into a [`models::Paper`]
//! 4. authors are classified by affiliation ([`classifier`])
//! 5. papers with company authors become [`models::FilteredPaper`]s and are
//!    printed as a table or written as CSV ([`formatters`])
//!
//! # Example
//!
//! ```no_run
//! use pharma_papers::{config::Config, processor, PubMedClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubMedClient::new(Config::from_env())?;
//!     let run = processor::fetch_filtered_papers(&client, "CAR-T lymphoma", 50).await?;
//!
//!     for paper in &run.papers {
//!         println!("{} {:?}", paper.id, paper.company_affiliations);
//!     }
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod parser;
pub mod processor;

pub use client::PubMedClient;
pub use config::Config;
pub use error::{ClientError, RecordError};
