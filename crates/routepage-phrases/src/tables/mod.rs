// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Hand-authored phrase tables, one module per locale.
//!
//! Every table carries the same key set as `en`. That is checked by the
//! coverage tests rather than at runtime; a key that goes missing still
//! resolves through the English table.

mod en;
mod es;
mod fr;
mod ru;

use crate::locale::Locale;

pub(crate) fn raw_table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => en::PHRASES,
        Locale::Es => es::PHRASES,
        Locale::Ru => ru::PHRASES,
        Locale::Fr => fr::PHRASES,
    }
}
