//! Alert system: expiry, then triggering.

use std::collections::BTreeSet;

use log::debug;

use tremor_core::events::{AlertInstance, SimEvent};
use tremor_core::scenario::Scenario;

/// Drop alerts whose time is up or that lie ahead of the clock after a
/// backwards seek, then raise any template whose trigger time has passed and
/// that has not fired before in this run.
///
/// Expiry is capped at the scenario duration, which the clock can reach.
pub fn run(
    scenario: &Scenario,
    now: f64,
    active: &mut Vec<AlertInstance>,
    triggered: &mut BTreeSet<String>,
    events: &mut Vec<SimEvent>,
) {
    active.retain(|alert| {
        if now >= alert.expires_at || now < alert.triggered_at {
            debug!("Alert expired: {}", alert.id);
            events.push(SimEvent::AlertExpired {
                alert_id: alert.id.clone(),
            });
            false
        } else {
            true
        }
    });

    for template in &scenario.alerts {
        if template.time > now {
            continue;
        }
        let id = scenario.alert_id(template);
        if triggered.contains(&id) {
            continue;
        }
        debug!("Alert raised at t={now:.1}: {id}");
        triggered.insert(id.clone());
        events.push(SimEvent::AlertRaised {
            alert_id: id.clone(),
            kind: template.kind,
        });
        active.push(AlertInstance {
            id,
            kind: template.kind,
            title: template.title.clone(),
            body: template.body.clone(),
            triggered_at: now,
            expires_at: (now + template.duration).min(scenario.duration),
        });
    }
}
