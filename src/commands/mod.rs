// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod estimate;
pub mod journal;
pub mod schedule;
