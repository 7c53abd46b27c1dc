use schemagate_registry::SchemaConsumer;
use schemagate_validate::{SchemaValidator, ValidateError};

use crate::cmd::{single_sink, CheckArgs};
use crate::exit::{io_error, validate_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_check, OutputFormat};

pub async fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = std::fs::read_to_string(&args.file)
        .map_err(|err| io_error("reading payload file", err))?;

    let sink = single_sink(&args.dir, &args.url)?;
    let validator = SchemaValidator::new(SchemaConsumer::new(sink));

    match validator.validate(&payload, &args.path).await {
        Ok(()) => {
            print_check(&args.path, &[], format);
            Ok(SUCCESS)
        }
        // A non-conforming payload is an expected verdict, not a CLI error.
        Err(ValidateError::ValidationFailed { violations, .. }) => {
            print_check(&args.path, &violations, format);
            Ok(DATA_INVALID)
        }
        Err(err) => Err(validate_error("validating payload", err)),
    }
}
