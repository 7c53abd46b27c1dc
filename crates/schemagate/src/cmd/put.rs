use std::sync::Arc;

use schemagate_registry::SchemaProducer;
use schemagate_sink::{FsSink, HttpSink};

use crate::cmd::PutArgs;
use crate::exit::{io_error, registry_error, sink_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_produced, OutputFormat};

pub async fn run(args: PutArgs, format: OutputFormat) -> CliResult<i32> {
    let schema = std::fs::read_to_string(&args.file)
        .map_err(|err| io_error("reading schema file", err))?;

    let mut producer = SchemaProducer::new();
    for dir in &args.dirs {
        let sink = FsSink::new(dir.display().to_string())
            .map_err(|err| sink_error("configuring sink", err))?;
        producer.register(Arc::new(sink));
    }
    for url in &args.urls {
        let sink =
            HttpSink::new(url.clone()).map_err(|err| sink_error("configuring sink", err))?;
        producer.register(Arc::new(sink));
    }
    if producer.sink_count() == 0 {
        return Err(CliError::new(USAGE, "at least one --dir or --url is required"));
    }

    producer
        .produce(&schema, &args.path)
        .await
        .map_err(|err| registry_error("publishing schema", err))?;
    tracing::info!(path = %args.path, sinks = producer.sink_count(), "schema published");

    print_produced(&args.path, producer.sink_count(), format);
    Ok(SUCCESS)
}
