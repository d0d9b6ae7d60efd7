// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tab model.
//!
//! Tab descriptors, hide-lists and the visible tab set derived from them.

pub mod hide;
pub mod ids;
pub mod tab;

pub use hide::{HideEntry, HideList};
pub use ids::{IconName, Id, IdError, TabName};
pub use tab::{compute_visible, AmbiguousAlias, ModelError, TabDescriptor, TabSet};
