/*!
 * Process List Validation
 * Input checks performed before any simulation starts
 */

use super::types::ProcessSpec;
use crate::core::errors::InputError;
use crate::core::types::Tick;
use std::collections::HashSet;

/// Validate a process list
///
/// Rejects empty lists, empty or duplicate ids, negative arrivals and
/// non-positive bursts. The first offending process (in input order) is
/// reported. Finally the latest arrival plus the total burst must fit in a
/// `Tick`, which bounds every clock value a policy can reach.
pub fn validate_processes(processes: &[ProcessSpec]) -> Result<(), InputError> {
    if processes.is_empty() {
        return Err(InputError::EmptyProcessList);
    }

    let mut seen = HashSet::with_capacity(processes.len());
    for (index, spec) in processes.iter().enumerate() {
        if spec.id.trim().is_empty() {
            return Err(InputError::EmptyId { index });
        }

        if !seen.insert(spec.id.as_str()) {
            return Err(InputError::DuplicateId(spec.id.clone()));
        }

        if spec.arrival < 0 {
            return Err(InputError::NegativeArrival {
                id: spec.id.clone(),
                arrival: spec.arrival,
            });
        }

        if spec.burst <= 0 {
            return Err(InputError::NonPositiveBurst {
                id: spec.id.clone(),
                burst: spec.burst,
            });
        }
    }

    if horizon(processes).is_none() {
        return Err(InputError::HorizonOverflow);
    }

    Ok(())
}

/// Upper bound on any completion time, `None` if it overflows a `Tick`
fn horizon(processes: &[ProcessSpec]) -> Option<Tick> {
    let (latest, work) = processes
        .iter()
        .try_fold((0 as Tick, 0 as Tick), |(latest, work), spec| {
            let work = work.checked_add(Tick::try_from(spec.burst).ok()?)?;
            Some((latest.max(Tick::try_from(spec.arrival).ok()?), work))
        })?;
    latest.checked_add(work)
}
