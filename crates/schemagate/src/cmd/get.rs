use schemagate_registry::SchemaConsumer;

use crate::cmd::{single_sink, GetArgs};
use crate::exit::{registry_error, CliResult, SUCCESS};
use crate::output::{print_schema, OutputFormat};

pub async fn run(args: GetArgs, format: OutputFormat) -> CliResult<i32> {
    let sink = single_sink(&args.dir, &args.url)?;
    let consumer = SchemaConsumer::new(sink);

    let schema = consumer
        .consume(&args.path)
        .await
        .map_err(|err| registry_error("fetching schema", err))?;

    print_schema(&args.path, consumer.base_location(), &schema, format);
    Ok(SUCCESS)
}
