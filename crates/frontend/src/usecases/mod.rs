pub mod u100_upload_dataset;
