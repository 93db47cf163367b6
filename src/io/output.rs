use crate::core::ContractReport;
use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &ContractReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ContractReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Line-oriented report: the summary counts followed by one `MISSING` line
/// per unmapped frontend endpoint.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ContractReport) -> anyhow::Result<()> {
        writeln!(self.writer, "Frontend endpoints: {}", report.frontend_endpoints)?;
        writeln!(self.writer, "Backend endpoints: {}", report.backend_endpoints)?;
        writeln!(self.writer, "Missing mappings: {}", report.missing.len())?;

        for endpoint in &report.missing {
            writeln!(
                self.writer,
                "MISSING {} {} from {}",
                endpoint.method,
                endpoint.path,
                endpoint.source.display()
            )?;
        }

        Ok(())
    }
}

pub fn create_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
