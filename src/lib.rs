// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Undine — ASCII diagram recognition (grid scan + connector tracing + graph assembly).
//!
//! The entry point is [`parse::parse_diagram`], which takes a text drawing and
//! returns a neutral [`model::Graph`]. Thin adapters over the neutral graph
//! live in [`export`].

pub mod export;
pub mod model;
pub mod parse;
