// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Plain-text report output.

use std::fmt::Write;

use super::{REPORT_VERSION, ReportContext, ReportFormatter};
use crate::record::AnalysisRecord;

/// Text format report formatter.
pub struct TextFormatter;

/// Occurrences listed with context before the rest are summarized.
pub const POSITION_DETAIL_LIMIT: usize = 20;

/// Scalar values of context shown on each side of an occurrence.
pub const CONTEXT_RADIUS: usize = 15;

const WIDTH: usize = 70;

impl ReportFormatter for TextFormatter {
    fn format(&self, ctx: &ReportContext<'_>) -> crate::Result<String> {
        let heavy = "=".repeat(WIDTH);
        let light = "-".repeat(WIDTH);
        let mut out = String::with_capacity(4096);

        writeln!(out, "INFORME DE DETECCIÓN DE CARACTERES INVISIBLES")?;
        writeln!(out, "{heavy}")?;
        writeln!(out)?;

        let generated = ctx.generated();
        writeln!(out, "Fecha: {}", generated.format("%d/%m/%Y"))?;
        writeln!(out, "Hora: {}", generated.format("%H:%M:%S"))?;
        writeln!(out, "Versión: {REPORT_VERSION}")?;
        writeln!(out)?;

        let stats = ctx.stats();
        writeln!(out, "ESTADÍSTICAS DEL TEXTO")?;
        writeln!(out, "{light}")?;
        writeln!(out, "Total de caracteres: {}", stats.characters)?;
        writeln!(out, "Total de palabras: {}", stats.words)?;
        writeln!(out)?;

        match ctx.findings() {
            None => writeln!(out, "RESULTADO: No se encontraron caracteres invisibles.")?,
            Some(record) => write_findings(&mut out, ctx, record, &light)?,
        }

        writeln!(out)?;
        writeln!(out, "{heavy}")?;
        writeln!(out, "Generado por glyphless v{REPORT_VERSION}")?;
        Ok(out)
    }
}

fn write_findings(
    out: &mut String,
    ctx: &ReportContext<'_>,
    record: &AnalysisRecord,
    light: &str,
) -> std::fmt::Result {
    writeln!(out, "CARACTERES INVISIBLES DETECTADOS: {}", record.total())?;
    writeln!(out, "{light}")?;
    writeln!(out)?;

    let patterns = record.patterns();
    writeln!(out, "ANÁLISIS DE PATRONES")?;
    writeln!(out, "Densidad: {:.4}%", patterns.density * 100.0)?;
    writeln!(out, "Distribución: {}", patterns.distribution.as_str())?;
    writeln!(out, "Clusters detectados: {}", patterns.clustering.cluster_count)?;
    writeln!(
        out,
        "Tamaño promedio de cluster: {:.2}",
        patterns.clustering.average_cluster_size
    )?;
    if let Some(p) = patterns.periodicity {
        writeln!(
            out,
            "Patrón periódico: Cada ~{} caracteres ({} veces)",
            p.interval, p.frequency
        )?;
    }
    writeln!(out)?;

    if let Some(automation) = record.automation() {
        writeln!(out, "EVALUACIÓN DE CONTENIDO AUTOMATIZADO")?;
        writeln!(out, "{light}")?;
        writeln!(out, "Probabilidad: {}", automation.likelihood.as_str())?;
        writeln!(out, "Confianza: {}", automation.confidence.as_str())?;
        writeln!(out, "Score: {}/10", automation.score)?;
        if !automation.signals.is_empty() {
            writeln!(out)?;
            writeln!(out, "Señales detectadas:")?;
            for (i, signal) in automation.signals.iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, signal)?;
            }
        }
        writeln!(out)?;
        writeln!(out, "⚠️  ADVERTENCIA: {}", automation.disclaimer)?;
        writeln!(out)?;
    }

    writeln!(out, "CARACTERES POR CATEGORÍA")?;
    writeln!(out, "{light}")?;
    for group in record.by_category().iter() {
        writeln!(out)?;
        writeln!(
            out,
            "{} ({} encontrados):",
            group.category.as_str().to_uppercase(),
            group.occurrences.len()
        )?;
        let mut tally: Vec<(&str, usize)> = Vec::new();
        for occ in &group.occurrences {
            match tally.iter_mut().find(|(name, _)| *name == occ.pattern.name) {
                Some((_, count)) => *count += 1,
                None => tally.push((occ.pattern.name, 1)),
            }
        }
        for (name, count) in tally {
            writeln!(out, "  - {name}: {count}")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "DETALLES DE POSICIONES (primeras {POSITION_DETAIL_LIMIT})")?;
    writeln!(out, "{light}")?;
    for (i, occ) in record.occurrences().iter().take(POSITION_DETAIL_LIMIT).enumerate() {
        let (before, after) = ctx.window(occ.offset, CONTEXT_RADIUS);
        writeln!(out)?;
        writeln!(out, "[{}] {} en posición {}", i + 1, occ.pattern.name, occ.offset)?;
        if !occ.pattern.note.is_empty() {
            writeln!(out, "    Info: {}", occ.pattern.note)?;
        }
        writeln!(out, "    Contexto: \"...{before}[▪]{after}...\"")?;
    }

    let omitted = record.total().saturating_sub(POSITION_DETAIL_LIMIT);
    if omitted > 0 {
        writeln!(out)?;
        writeln!(out, "... y {omitted} más.")?;
    }
    Ok(())
}
