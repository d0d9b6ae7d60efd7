// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tabnav: tab-navigation reconciler for dashboard sections.
//!
//! A tab bar is configured with a base path, a tab list and a hide-list. On every location change
//! the [`reconcile::NavigationReconciler`] decides whether the location is valid for the visible
//! tabs and, if not, replaces it through a [`reconcile::Navigator`]. The active tab's icon and
//! label are published through a [`section::SectionContext`] for header displays.

pub mod model;
pub mod overview;
pub mod reconcile;
pub mod render;
pub mod route;
pub mod section;
pub mod store;
pub mod tui;
