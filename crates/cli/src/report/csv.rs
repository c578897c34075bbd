// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! CSV format report output: one row per occurrence.

use std::fmt::Write;

use super::{ReportContext, ReportFormatter};

/// CSV format report formatter.
pub struct CsvFormatter;

pub const CSV_HEADER: &str =
    "Position,Código Unicode,Nombre,Categoría,Prioridad,Contexto Antes,Contexto Después";

/// Returned instead of a table when nothing was found.
pub const CSV_NONE_FOUND: &str = "No se encontraron caracteres invisibles";

/// Scalar values of context on each side of an occurrence.
pub const CSV_CONTEXT_RADIUS: usize = 10;

impl ReportFormatter for CsvFormatter {
    fn format(&self, ctx: &ReportContext<'_>) -> crate::Result<String> {
        let Some(record) = ctx.findings() else {
            return Ok(CSV_NONE_FOUND.to_string());
        };

        let mut out = String::with_capacity(CSV_HEADER.len() + record.total() * 96);
        writeln!(out, "{CSV_HEADER}")?;
        for occ in record.occurrences() {
            let (before, after) = ctx.window(occ.offset, CSV_CONTEXT_RADIUS);
            writeln!(
                out,
                "{},{},\"{}\",{},{},\"{}\",\"{}\"",
                occ.offset,
                occ.pattern.code_point_hex(),
                occ.pattern.name,
                occ.pattern.category,
                occ.pattern.priority,
                escape(&before),
                escape(&after),
            )?;
        }
        Ok(out)
    }
}

/// Double embedded quotes for a quoted CSV field.
fn escape(field: &str) -> String {
    field.replace('"', "\"\"")
}
