//! Vehicle selector message handlers

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::{App, TOAST_DURATION};
use crate::features::{FocusRegion, VehicleQuery};
use crate::i18n::Key;
use crate::ui::widgets::Toast;

impl App {
    /// Handle vehicle selector messages
    pub fn handle_vehicle(&mut self, message: &Message) -> Option<Task<Message>> {
        let form = &mut self.ui.vehicle;
        match message {
            Message::VehicleMake(make) => form.set_make(*make),
            Message::VehicleModel(model) => form.set_model(*model),
            Message::VehicleYear(year) => form.set_year(*year),
            Message::VehicleEngine(engine) => form.set_engine(*engine),
            Message::VehicleTransmission(transmission) => form.set_transmission(*transmission),
            Message::VehicleTrim(trim) => form.set_trim(*trim),
            Message::VehicleVinChanged(vin) => form.set_vin(vin.clone()),

            Message::VehicleReset => {
                form.reset();
                tracing::debug!("Vehicle selector cleared");
            }

            Message::VehicleSubmit => {
                self.ui.focus = FocusRegion::VehicleSelector;
                return Some(match self.ui.vehicle.submit() {
                    Ok(query) => start_search(query),
                    Err(errors) => {
                        tracing::debug!("Vehicle form has {} errors", errors.len());
                        Task::none()
                    }
                });
            }

            Message::VehicleVinSearch => {
                self.ui.focus = FocusRegion::VehicleSelector;
                return Some(match self.ui.vehicle.submit_vin() {
                    Ok(query) => start_search(query),
                    Err(error) => {
                        tracing::debug!("VIN search rejected: {}", error.message);
                        Task::none()
                    }
                });
            }

            Message::VehicleSearchFinished(result) => {
                form.finish_search();
                let toast_id = match result {
                    Ok(query) => {
                        let summary = query.summary();
                        tracing::info!("Vehicle search finished: {}", summary);
                        self.ui.show_toast(|id| Toast::success(id, summary))
                    }
                    Err(e) => {
                        tracing::error!("Vehicle search failed: {}", e);
                        let text = self.core.locale.get(Key::ToastSearchFailed);
                        self.ui.show_toast(|id| Toast::error(id, text))
                    }
                };
                return Some(helpers::delayed(TOAST_DURATION, Message::HideToast(toast_id)));
            }

            _ => return None,
        }

        self.ui.focus = FocusRegion::VehicleSelector;
        Some(Task::none())
    }
}

fn start_search(query: VehicleQuery) -> Task<Message> {
    Task::perform(helpers::simulate_vehicle_search(query), |result| {
        Message::VehicleSearchFinished(result.map_err(|e| e.to_string()))
    })
}
