// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Security analysis modules
//!
//! - Framing protection (X-Frame-Options, CSP frame-ancestors)
//! - CSP directive parsing

mod csp;
mod framing;

pub use csp::{CspPolicy, FRAME_ANCESTORS};
pub use framing::{FramingAnalyzer, PartialCspPolicy, Protection};
