// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;

use crate::{Controlled, ControlledChild, Controller, PtyCommandBuilder, PtyConfig,
            PtyOutputEvent, PtyReadOnlySession,
            common_impl::{create_pty_pair, spawn_blocking_controller_reader_task,
                          spawn_command_in_pty}};

impl PtyCommandBuilder {
    /// Spawns a read-only PTY session; it spawns two Tokio tasks and one OS child
    /// process.
    ///
    /// ```text
    /// ┌──────────────┐ ◄── events ◄── ┌───────────────────────────────┐
    /// │ Your Program │                │ Spawned Task (1) in Read Only │
    /// │              │                │            session            │
    /// │              │                │               ▼               │
    /// │ Handle       │                │ ◄─── PTY creates pair ──────► │
    /// │ events and   │                │ ┊Master/   ┊     ┊Slave/    ┊ │
    /// │ process      │                │ ┊Controller┊     ┊Controlled┊ │
    /// │ completion   │                │     ▼                 ▼       │
    /// │ from read    │                │ Spawn Tokio       Controlled  │
    /// │ only session │                │ blocking task     spawns      │
    /// │              │                │ (2) to read       child       │
    /// │              │                │ from              process (3) │
    /// │              │                │ Controller and                │
    /// │              │                │ generate events               │
    /// │              │                │ for your program              │
    /// └──────────────┘                └───────────────────────────────┘
    /// ```
    ///
    /// # Why 3 Tasks?
    ///
    /// 1. **Background orchestration task [`tokio::spawn`]** -> Required because this
    ///    function needs to return immediately with a session handle, allowing the caller
    ///    to start processing events while the PTY command runs in the background.
    ///    Without this, the function would block until the entire PTY session completes.
    ///
    /// 2. **OS child process [`ControlledChild`]** -> The actual command being executed
    ///    in the PTY. This is not a Tokio task but a system process that runs your
    ///    command with proper terminal emulation.
    ///
    /// 3. **Blocking reader task [`tokio::task::spawn_blocking`]** -> Required because
    ///    PTY file descriptors only provide synchronous [`std::io::Read`] APIs, not async
    ///    [`tokio::io::AsyncRead`]. Using regular [`tokio::spawn`] with blocking reads
    ///    would block the entire async runtime. [`spawn_blocking`] runs these synchronous
    ///    reads on a dedicated thread pool.
    ///
    /// # Returns
    ///
    /// A session with:
    /// - `output_event_receiver_half` combined stdout/stderr of child process -> events
    /// - `completion_handle` to await spawned child process completion
    ///
    /// # Example: Capturing OSC sequences from cargo build
    ///
    /// ```rust,no_run
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use r3bl_tui::{PtyCommandBuilder, PtyConfigOption, PtyOutputEvent, OscEvent};
    ///
    /// let mut session = PtyCommandBuilder::new("cargo")
    ///     .args(["build"])
    ///     .enable_osc_sequences()  // Enable OSC 9;4 progress sequences
    ///     .spawn_read_only(PtyConfigOption::Osc + PtyConfigOption::Output)?;
    ///
    /// let mut output = Vec::new();
    /// while let Some(event) = session.output_event_receiver_half.recv().await {
    ///     match event {
    ///         PtyOutputEvent::Output(data) => output.extend_from_slice(&data),
    ///         PtyOutputEvent::Osc(OscEvent::ProgressUpdate(pct)) => {
    ///             println!("Build progress: {}%", pct);
    ///         }
    ///         PtyOutputEvent::Exit(status) if status.success() => {
    ///             println!("Build completed successfully");
    ///             break;
    ///         }
    ///         PtyOutputEvent::Exit(status) => {
    ///             eprintln!("Build failed with: {:?}", status);
    ///             break;
    ///         }
    ///         _ => {}
    ///     }
    /// }
    /// println!("Build output: {}", String::from_utf8_lossy(&output));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the PTY fails to spawn or initialize properly.
    ///
    /// [`tokio::spawn`]: tokio::spawn
    /// [`tokio::task::spawn_blocking`]: tokio::task::spawn_blocking
    /// [`std::io::Read`]: std::io::Read
    /// [`tokio::io::AsyncRead`]: tokio::io::AsyncRead
    /// [`spawn_blocking`]: tokio::task::spawn_blocking
    /// [`ControlledChild`]: crate::ControlledChild
    pub fn spawn_read_only(
        self,
        config: impl Into<PtyConfig>,
    ) -> miette::Result<PtyReadOnlySession> {
        let config = config.into();

        // Create channel to bridge events from PTY controlled side -> your program.
        let (output_event_sender_half, output_event_receiver_half) =
            tokio::sync::mpsc::unbounded_channel();

        // [🛫 SPAWN 0] Spawn the main orchestration task. The caller waits for this one.
        // Pin the completion handle: JoinHandle is not Unpin but select! requires it for
        // efficient polling without moving.
        let completion_handle = Box::pin(tokio::spawn(async move {
            // Build the command, ensuring CWD is set.
            let command = self.build()?;

            // Create PTY pair: controller (master) for your program, controlled (slave)
            // for spawned process
            let (controller, controlled): (Controller, Controlled) =
                create_pty_pair(&config)?;

            // [🛫 SPAWN 1] Spawn the command with PTY (makes is_terminal() return true).
            // The child process uses the controlled side as its stdin/stdout/stderr.
            let mut controlled_child: ControlledChild =
                spawn_command_in_pty(&controlled, command)?;

            // [🛫 SPAWN 2] Spawn the reader task to process output from the controller
            // side. NOTE: Critical resource management - see module docs for
            // PTY lifecycle details.
            let blocking_controller_reader_task_join_handle = {
                let controller_reader = controller
                    .try_clone_reader()
                    .map_err(|e| miette::miette!("Failed to clone pty reader: {}", e))?;
                spawn_blocking_controller_reader_task(
                    controller_reader,
                    output_event_sender_half.clone(),
                    config,
                )
            };

            // [🛬 WAIT 1] Wait for the command to complete.
            let status = tokio::task::spawn_blocking(move || controlled_child.wait())
                .await
                .into_diagnostic()?
                .into_diagnostic()?;

            let exit_code = status.exit_code();
            let _unused = output_event_sender_half.send(PtyOutputEvent::Exit(status));

            // See module docs for detailed PTY lifecycle management explanation.
            drop(controlled); // Close the controlled half. CRITICAL for EOF to be sent to reader.
            drop(controller); // Not critical, but good practice to release controller FD.

            // [🛬 WAIT 2] Wait for the reader task to complete.
            blocking_controller_reader_task_join_handle
                .await
                .into_diagnostic()??;

            Ok(portable_pty::ExitStatus::with_exit_code(exit_code))
        }));

        Ok(PtyReadOnlySession {
            output_event_receiver_half,
            completion_handle,
        })
    }
}
