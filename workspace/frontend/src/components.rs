pub mod predict_form;
pub mod prediction_chart;
