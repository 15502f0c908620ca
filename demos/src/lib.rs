// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo crate for the Curio workspace. See the `examples/` directory.
