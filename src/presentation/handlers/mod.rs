// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod analytics_handler;
pub mod category_handler;
pub mod home_handler;
pub mod library_handler;
