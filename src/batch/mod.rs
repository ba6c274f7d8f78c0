// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod dataset;
pub mod resolver;
pub mod sample;
