use super::commands::ControllerCommand;
use crate::ScreenController;

use st_core::ScreenState;

use log::{debug, info};
use tokio::sync::{mpsc, watch};

/// Owns the [`ScreenController`] and applies commands sequentially.
pub struct ControllerActor {
    receiver: mpsc::Receiver<ControllerCommand>,
    controller: ScreenController,
    screen_publisher: watch::Sender<ScreenState>,
}

impl ControllerActor {
    pub fn new(
        receiver: mpsc::Receiver<ControllerCommand>,
        controller: ScreenController,
        screen_publisher: watch::Sender<ScreenState>,
    ) -> Self {
        Self {
            receiver,
            controller,
            screen_publisher,
        }
    }

    /// Process commands until every sender has been dropped.
    pub async fn run(mut self) {
        info!("Screen controller started on {} screen", self.controller.screen());

        while let Some(cmd) = self.receiver.recv().await {
            self.handle_command(cmd).await;
        }

        info!("Screen controller stopped on {} screen", self.controller.screen());
    }

    async fn handle_command(&mut self, cmd: ControllerCommand) {
        match cmd {
            ControllerCommand::Dispatch { action, respond_to } => {
                debug!("Dispatching {}", action.name());
                let result = self.controller.handle(action).await;
                self.publish_screen();
                // Caller may have given up waiting
                let _ = respond_to.send(result);
            }
            ControllerCommand::GetScreen { respond_to } => {
                let _ = respond_to.send(self.controller.screen());
            }
            ControllerCommand::GetIdentity { respond_to } => {
                let _ = respond_to.send(self.controller.current_identity());
            }
            ControllerCommand::GetLastError { respond_to } => {
                let _ = respond_to.send(self.controller.last_error().map(str::to_string));
            }
        }
    }

    fn publish_screen(&self) {
        let screen = self.controller.screen();
        self.screen_publisher.send_if_modified(|current| {
            if *current == screen {
                false
            } else {
                *current = screen;
                true
            }
        });
    }
}
