// translate-relay-aws/src/lib.rs
// ============================================================================
// Module: Translate Relay AWS Backend
// Description: AWS Translate implementation of the backend gateway contract.
// Purpose: Bridge the relay core to the AWS SDK with one shared client.
// Dependencies: aws-config, aws-sdk-translate, translate-relay-core
// ============================================================================

//! ## Overview
//! This crate implements [`translate_relay_core::TranslationBackend`] over
//! the AWS Translate SDK. The SDK client is built once at startup from the
//! ambient credential chain (with optional region and endpoint overrides)
//! and shared read-only across requests. SDK failures are classified by
//! their error metadata code into the core error taxonomy.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod client;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::AwsTranslateBackend;
