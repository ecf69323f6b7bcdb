//! Type definitions for the gateway
//!
//! This module contains the inbound/outbound JSON bodies and the upstream
//! platform's wire shapes.

pub mod response;
pub mod upstream;

pub use response::{ErrorResponse, ParseResponse, PingResponse};
pub use upstream::{
    ApiEnvelope, DashStreams, DashTrack, DirectFile, PageInfo, PlayInfo, ViewInfo,
};
