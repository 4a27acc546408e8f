// ABOUTME: Shared utility helpers for the callback bridge
// ABOUTME: Currently the outbound HTTP client builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Outbound HTTP client construction
pub mod http_client;
