// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod api_engine;
pub mod chromium_driver;
pub mod interactive_engine;
pub mod page_driver;
pub mod router;
pub mod static_engine;
pub mod traits;
