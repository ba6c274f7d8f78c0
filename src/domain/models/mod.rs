// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod candidate_set;
pub mod postal_code;
pub mod surface;
