//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors and the resulting responses are
//! checked for status codes and bodies.

mod house;

use billing_test_utils::prelude::*;

use crate::util::{body_bytes, body_json, body_text};
