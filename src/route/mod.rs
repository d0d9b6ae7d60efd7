// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Location resolution.
//!
//! Pure decisions about whether a location is valid for a tab set, needs an alias redirect, or
//! falls back to the base path.

pub mod path;
pub mod resolve;

pub use path::{section_segment, BasePath, BasePathError};
pub use resolve::{follow_redirects, resolve, Decision, RedirectLoop, MAX_REDIRECT_DEPTH};

#[cfg(test)]
mod tests;
