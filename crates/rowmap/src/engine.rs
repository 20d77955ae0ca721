mod resolve;
use resolve::resolve;

use crate::{Mapper, Result};

use rowmap_core::{
    convert, err,
    schema::{Field, ModelSchema},
    Error, Record, Type, Value,
};

/// Reshapes a source record into a record keyed by the model's field names,
/// with every value already converted to the field's declared type.
///
/// Fields that cannot be filled are `Null`, which the model loads as zero.
pub(crate) fn map_record(
    mapper: &Mapper,
    source: &Record,
    schema: &ModelSchema,
) -> Result<Record> {
    let mut mapped = Record::with_capacity(schema.fields.len());

    for field in &schema.fields {
        let value = map_field(mapper, source, schema, field)?;
        mapped.insert(field.name, value);
    }

    Ok(mapped)
}

fn map_field(
    mapper: &Mapper,
    source: &Record,
    schema: &ModelSchema,
    field: &Field,
) -> Result<Value> {
    let expected = field.source_name();

    let Some((name, value)) = resolve(source, expected) else {
        tracing::debug!(
            model = schema.name,
            field = field.name,
            expected,
            "no source field; leaving zero value"
        );
        return Ok(Value::Null);
    };

    tracing::trace!(model = schema.name, field = field.name, source = name, "resolved field");

    let mapped = map_value(mapper, value, &field.ty)
        .map_err(|e| e.context(err!("mapping {}.{}", schema.name, field.name)))?;

    match mapped {
        Ok(value) => Ok(value),
        Err(mismatch) if mapper.is_strict() => {
            let err = Error::incompatible_field(
                schema.name,
                field.name,
                mismatch.found,
                mismatch.expected,
            );

            // Innermost index first, so the outermost one is rendered first.
            Err(mismatch
                .path
                .iter()
                .rev()
                .fold(err, |err, index| err.context(err!("element {index}"))))
        }
        Err(mismatch) => {
            tracing::debug!(
                model = schema.name,
                field = field.name,
                source = name,
                found = mismatch.found.type_name(),
                expected = %mismatch.expected,
                "incompatible source field; leaving zero value"
            );
            Ok(Value::Null)
        }
    }
}

/// A source value that does not fit its target type.
#[derive(Debug)]
struct Mismatch<'a> {
    found: &'a Value,
    expected: &'a Type,

    /// List indices leading to `found`, outermost first
    path: Vec<usize>,
}

type Mapped<'a> = std::result::Result<Value, Mismatch<'a>>;

/// Maps one source value to the type `ty`.
///
/// The inner `Err` reports the value that could not be mapped.
fn map_value<'a>(mapper: &Mapper, value: &'a Value, ty: &'a Type) -> Result<Mapped<'a>> {
    let mapped = match (value, ty.unwrap_option()) {
        (Value::Nullable(wrapper), _) => convert::convert(wrapper, ty),
        (Value::Record(record), Type::Model(model)) => {
            Some(Value::Record(map_record(mapper, record, model.schema())?))
        }
        (Value::List(items), Type::List(elem)) => return map_list(mapper, items, elem),
        (value, _) => ty.assign(value),
    };

    Ok(mapped.ok_or(Mismatch {
        found: value,
        expected: ty,
        path: vec![],
    }))
}

fn map_list<'a>(mapper: &Mapper, items: &'a [Value], elem: &'a Type) -> Result<Mapped<'a>> {
    let mut mapped = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let value = map_value(mapper, item, elem)
            .map_err(|e| e.context(err!("element {index}")))?;

        match value {
            Ok(value) => mapped.push(value),
            Err(mut mismatch) if mapper.is_strict() => {
                mismatch.path.insert(0, index);
                return Ok(Err(mismatch));
            }
            Err(mismatch) => {
                tracing::debug!(
                    index,
                    found = mismatch.found.type_name(),
                    expected = %mismatch.expected,
                    "incompatible list element; leaving zero value"
                );
                mapped.push(Value::Null);
            }
        }
    }

    Ok(Ok(Value::List(mapped)))
}
