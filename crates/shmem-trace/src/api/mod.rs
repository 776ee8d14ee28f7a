// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The generated wrapper surface, one module per operation family.

pub mod atomic;
pub mod collective;
pub mod lifecycle;
pub mod memory;
pub mod rma;
pub mod sync;
