// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod build;
pub mod facets;
pub mod list;
pub mod serve;
pub mod show;
