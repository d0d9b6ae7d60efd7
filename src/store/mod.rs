// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tab configuration files.
//!
//! A config file holds the base path, the tab list, the hide-list and the sequence flag as
//! camelCase JSON.

pub mod config_file;

pub use config_file::{config_schema, StoreError, TabConfigFile, TabConfigJson};
