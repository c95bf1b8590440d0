use crate::config::Config;
use crate::probe::Probe;

pub async fn cmd_probe(
    config: &Config,
    query: &[String],
    output_dir: Option<&str>,
) -> anyhow::Result<()> {
    let mut probe_config = config.probe.clone();
    if !query.is_empty() {
        probe_config.query = query.join(" ");
    }
    if let Some(dir) = output_dir {
        probe_config.output_dir = Some(dir.to_string());
    }

    let probe = Probe::from_config(&probe_config);
    let mut stdout = std::io::stdout().lock();
    probe.run(&mut stdout).await?;

    Ok(())
}
