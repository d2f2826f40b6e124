use crate::gui_bridge::model::DashboardModel;
use crate::workflow::runner::{read_state, SharedState};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use vitalcore::prelude::PatientContext;
use warp::Filter;

pub fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

/// Read-only HTTP feed of the monitor state for the dashboard front end.
#[derive(Clone)]
pub struct GuiBridge {
    state: SharedState,
    patient: Arc<PatientContext>,
}

impl GuiBridge {
    pub fn new(state: SharedState, patient: PatientContext) -> Self {
        Self {
            state,
            patient: Arc::new(patient),
        }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let state = self.state.clone();
        let patient = self.patient.clone();
        let state_filter = warp::any().map(move || state.clone());
        let patient_filter = warp::any().map(move || patient.clone());

        let dashboard_route = warp::path("dashboard")
            .and(warp::path::end())
            .and(warp::get())
            .and(state_filter.clone())
            .and(patient_filter.clone())
            .map(|state: SharedState, patient: Arc<PatientContext>| {
                warp::reply::json(&DashboardModel::from_state(&patient, &read_state(&state)))
            });

        let vitals_route = warp::path("vitals")
            .and(warp::path::end())
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: SharedState| warp::reply::json(&read_state(&state).snapshot));

        let alerts_route = warp::path("alerts")
            .and(warp::path::end())
            .and(warp::get())
            .and(state_filter)
            .map(|state: SharedState| warp::reply::json(&read_state(&state).alerts));

        let patient_route = warp::path("patient")
            .and(warp::path::end())
            .and(warp::get())
            .and(patient_filter)
            .map(|patient: Arc<PatientContext>| warp::reply::json(patient.as_ref()));

        dashboard_route
            .or(vitals_route)
            .or(alerts_route)
            .or(patient_route)
    }

    pub async fn serve(self, addr: SocketAddr) {
        info!("dashboard feed listening on http://{}", addr);
        warp::serve(self.routes()).run(addr).await;
    }

    pub fn publish_status(&self, message: &str) {
        info!("[GUI] {}", message);
    }

    pub fn snapshot(&self) -> DashboardModel {
        DashboardModel::from_state(&self.patient, &read_state(&self.state))
    }
}
