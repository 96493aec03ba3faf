// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # regru-dns - Reg.ru DNS records for infrastructure-as-code tooling
//!
//! This crate lets an infrastructure-as-code tool manage DNS records hosted at the
//! Reg.ru registrar. It translates the declarative create, read and delete operations
//! of a `regru_dns_record` resource into calls against the Reg.ru HTTP API.
//!
//! ## Modules
//!
//! - [`regru`] - API client, request types and per-record-type parameter builders
//! - [`record_resource`] - Create/read/delete lifecycle of a DNS record
//! - [`schema`] - Field definitions for the provider block and the record resource
//! - [`config`] - Provider configuration and environment defaults
//! - [`dns_errors`] - Error taxonomy
//! - [`http_errors`] / [`status_reasons`] - Stable reason codes for failures
//!
//! ## Example
//!
//! ```rust,no_run
//! use regru_dns::config::ProviderConfig;
//! use regru_dns::record_resource::{create_record, RecordDescriptor};
//!
//! # async fn example() -> Result<(), regru_dns::dns_errors::RegruError> {
//! let client = ProviderConfig::from_env().build_client()?;
//!
//! let record = RecordDescriptor::new("MX", "@", "10 mail.example.com", "example.com");
//! let id = create_record(&client, &record).await?;
//! assert_eq!(id.as_str(), "@.example.com");
//! # Ok(())
//! # }
//! ```
//!
//! ## Supported records
//!
//! | Type  | Action      | Value format               |
//! |-------|-------------|----------------------------|
//! | A     | `add_alias` | IPv4 address               |
//! | AAAA  | `add_aaaa`  | IPv6 address               |
//! | CNAME | `add_cname` | Target host name           |
//! | MX    | `add_mx`    | `priority mailserver`      |
//! | TXT   | `add_txt`   | Free text                  |

pub mod config;
pub mod constants;
pub mod dns_errors;
pub mod http_errors;
pub mod record_resource;
pub mod regru;
pub mod schema;
pub mod status_reasons;
