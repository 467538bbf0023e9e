// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Page abstraction
//!
//! Everything the controller knows about the surface it drives:
//! - `layout.rs`   - Required identifiers and class names
//! - `document.rs` - `Document` (reads) and `View` (writes) traits
//! - `region.rs`   - `ToggleRegion`, one per show/hide panel
//! - `context.rs`  - `PageContext`, all handles resolved at startup
//! - `memory.rs`   - Headless `MemoryPage` implementation
//!
//! The GTK implementation lives in `ui::gtk_page` so this module stays
//! free of display dependencies.

pub mod context;
pub mod document;
pub mod error;
pub mod layout;
pub mod memory;
pub mod region;

pub use context::PageContext;
pub use document::{Document, View};
pub use error::PageError;
pub use layout::{PageLayout, RegionLayout};
pub use memory::{MemoryPage, NodeRef};
pub use region::ToggleRegion;

#[cfg(test)]
mod tests;
