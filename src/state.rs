// Represents the current high-level state of the application UI
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum State {
    Initialising, // App is starting and loading the config file
    Running,      // Main operational state, showing the lamp and controls
    About,        // Showing the about screen
}
