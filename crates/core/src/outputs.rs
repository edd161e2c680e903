// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key/value outputs extracted from script output markers.

/// Insertion-ordered output map. Re-inserting a key replaces its value.
pub type OutputMap = indexmap::IndexMap<String, String>;
