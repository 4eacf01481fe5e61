mod execute;
mod queries;
mod register;
mod set_active;
mod update_capability;
mod update_state;
