use crate::domain::model::{Chart, ChartKind, SeriesPoint};
use crate::domain::ports::ChartSink;
use crate::utils::error::Result;
use console::style;
use std::io::Write;

pub const DEFAULT_CHART_WIDTH: usize = 50;
const BAR_GLYPH: char = '█';
const BAR_AXIS_MAX: f64 = 100.0;

/// Draws charts as text on any writer.
pub struct TerminalChart<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> TerminalChart<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn bar(&self, fraction: f64) -> String {
        let cells = (fraction.clamp(0.0, 1.0) * self.width as f64).round() as usize;
        std::iter::repeat(BAR_GLYPH).take(cells).collect()
    }

    fn render_bar(&mut self, chart: &Chart, label_width: usize) -> Result<()> {
        writeln!(self.out, "{} (0 - {})", chart.value_label, BAR_AXIS_MAX)?;
        for point in &chart.points {
            let bar = self.bar(point.value / BAR_AXIS_MAX);
            writeln!(
                self.out,
                "{:<label_width$} | {:<bar_width$} {:.1}",
                point.label,
                bar,
                point.value,
                bar_width = self.width,
            )?;
        }
        writeln!(
            self.out,
            "{:<label_width$} +{}",
            "",
            "-".repeat(self.width + 1),
        )?;
        writeln!(
            self.out,
            "{:<label_width$}  0{:>axis$}",
            "",
            BAR_AXIS_MAX,
            axis = self.width,
        )?;
        Ok(())
    }

    fn render_pie(&mut self, chart: &Chart, label_width: usize) -> Result<()> {
        writeln!(self.out, "{}", chart.value_label)?;
        for (point, share) in chart.points.iter().zip(shares(&chart.points)) {
            let bar = self.bar(share / 100.0);
            writeln!(
                self.out,
                "{:<label_width$} | {:<bar_width$} {:.1}%",
                point.label,
                bar,
                share,
                bar_width = self.width,
            )?;
        }
        Ok(())
    }
}

impl<W: Write> ChartSink for TerminalChart<W> {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        let label_width = chart
            .points
            .iter()
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(self.out)?;
        writeln!(self.out, "{}", style(&chart.title).bold())?;
        match chart.kind {
            ChartKind::Bar => self.render_bar(chart, label_width)?,
            ChartKind::Pie => self.render_pie(chart, label_width)?,
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Percentage of the total each point contributes; all zero when the total is.
pub fn shares(points: &[SeriesPoint]) -> Vec<f64> {
    let total: f64 = points.iter().map(|p| p.value).sum();
    points
        .iter()
        .map(|p| if total > 0.0 { p.value / total * 100.0 } else { 0.0 })
        .collect()
}
