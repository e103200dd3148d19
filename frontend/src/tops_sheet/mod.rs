pub mod modal_top_sheet;
