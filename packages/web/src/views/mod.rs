mod layout;
pub use layout::DashboardLayout;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod datasets;
pub use datasets::Datasets;

mod dataset_detail;
pub use dataset_detail::DatasetDetail;

mod contracts;
pub use contracts::Contracts;

mod contract_detail;
pub use contract_detail::ContractDetail;

mod machines;
pub use machines::Machines;

mod settings;
pub use settings::Settings;
