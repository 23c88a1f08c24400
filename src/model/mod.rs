// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The neutral graph model produced by recognition.
//!
//! Independent of any host graph library; adapters in [`crate::export`]
//! translate it further.

pub mod graph;
pub mod ids;

pub use graph::{Graph, GraphEdge, GraphNode};
pub use ids::{Id, IdError, NodeId};
