mod host_list;
mod host_view;
mod log_list;

pub use host_list::HostList;
pub use host_view::HostView;
pub use log_list::LogList;
