use polars::prelude::*;

use crate::Instance;
use crate::error::{ClassifierError, Result};


/// Convert `polars::DataFrame` and `polars::Series` into instances.
///
/// Every column of `data` is cast to `Float64` and used as a feature;
/// `target` is cast to `Utf8` and used as the label.
/// Missing values are rejected.
pub fn from_dataframe(data: &DataFrame, target: &Series)
    -> Result<Vec<Instance<String>>>
{
    let (n_sample, _) = data.shape();
    if target.len() != n_sample {
        return Err(ClassifierError::Configuration(format!(
            "data has {n_sample} rows but target has {}",
            target.len()
        )));
    }

    let mut columns = Vec::with_capacity(data.width());
    for series in data.get_columns() {
        let casted = series.cast(&DataType::Float64)?;
        let values = casted.f64()?
            .into_iter()
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| ClassifierError::Configuration(
                format!("feature `{}` has missing values", series.name())
            ))?;
        columns.push(values);
    }

    let target = target.cast(&DataType::Utf8)?;
    let labels = target.utf8()?
        .into_iter()
        .map(|y| y.map(str::to_string))
        .collect::<Option<Vec<String>>>()
        .ok_or_else(|| ClassifierError::Configuration(
            "target has missing values".into()
        ))?;

    let instances = labels.into_iter()
        .enumerate()
        .map(|(i, y)| {
            let features = columns.iter()
                .map(|column| column[i])
                .collect::<Vec<_>>();
            Instance::new(features, y)
        })
        .collect::<Vec<_>>();
    Ok(instances)
}
