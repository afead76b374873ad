use ms_kernels::{scenarios, Templates};
use ms_params::{
    enumerate, print_combinations, print_parameters, print_tree, Component, DiagnosticSink,
    SearchConfig, StdoutSink,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {key}={raw}: {e}")),
        Err(_) => Ok(default),
    }
}

fn load_config() -> anyhow::Result<SearchConfig> {
    let config = match std::env::var("MODSEL_CONFIG") {
        Ok(path) => SearchConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        Err(_) => SearchConfig::default(),
    };
    let config = SearchConfig {
        sample_count: env_or("MODSEL_SAMPLE_COUNT", config.sample_count)?,
        random_ratio: env_or("MODSEL_RANDOM_RATIO", config.random_ratio)?,
        seed: env_or("MODSEL_SEED", config.seed)?,
    };
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config()?;
    info!("Sampling every range with {} points", config.sample_count);

    let templates = Templates::new();
    let mut sink = StdoutSink;

    let components: [&dyn Component; 4] = [
        &templates.power,
        &templates.gaussian,
        &templates.distant_segments,
        &templates.minkowski,
    ];
    for component in components {
        print_parameters(component, &mut sink)?;
    }
    sink.write_line("")?;

    for (label, tree) in scenarios::all(&templates, &config)? {
        info!(
            "Tree '{}': {:?} combinations expected",
            label,
            tree.combination_count()
        );
        print_tree(&tree, &mut sink)?;

        let combinations = enumerate(&tree)?;
        print_combinations(&combinations, &mut sink)?;
        sink.write_line("")?;
    }

    Ok(())
}
