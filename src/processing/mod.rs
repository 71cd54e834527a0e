/// Processing stage module
///
/// The cosmetic progress sequence shown while the presentation is being
/// generated lives here (script.rs). The actual service call is issued by
/// the wizard root once the script reports completion.

pub mod script;
