/// Linear wizard state for one session
///
/// The wizard advances through four steps in a fixed order. Each forward
/// transition is triggered by exactly one child message and attaches one
/// piece of data to the session record; "new project" resets everything.
/// Any other transition request is refused, which keeps the step pointer
/// and the record contents consistent at all times.

use super::project::{EncodedImage, ProcessingResult, ProjectDetails, ProjectRecord};

/// One of the fixed, linearly ordered wizard stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Intro screen and project detail form
    Welcome,
    /// Image collection
    Upload,
    /// Scripted progress sequence plus the outbound service call
    Processing,
    /// Completion screen with the download action
    Download,
}

/// The step pointer and the session record, always mutated together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    step: Step,
    record: Option<ProjectRecord>,
}

impl Session {
    /// Start a new session: welcome screen, no record yet
    pub fn new() -> Self {
        Self {
            step: Step::Welcome,
            record: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn record(&self) -> Option<&ProjectRecord> {
        self.record.as_ref()
    }

    /// Detail form submitted: create the record and move to the upload step.
    /// Refused unless the wizard is on the welcome step.
    pub fn submit_details(&mut self, details: ProjectDetails) -> bool {
        if self.step != Step::Welcome {
            return false;
        }
        self.record = Some(ProjectRecord::new(details));
        self.step = Step::Upload;
        true
    }

    /// Encoded images handed off: attach them and move to processing.
    /// Refused unless the wizard is on the upload step with a record.
    pub fn images_ready(&mut self, images: Vec<EncodedImage>) -> bool {
        if self.step != Step::Upload {
            return false;
        }
        match self.record.as_mut() {
            Some(record) => {
                record.images = Some(images);
                self.step = Step::Processing;
                true
            }
            None => false,
        }
    }

    /// Service call finished: attach the result and move to the download step.
    /// Refused unless the wizard is on the processing step with a record.
    pub fn processing_complete(&mut self, result: ProcessingResult) -> bool {
        if self.step != Step::Processing {
            return false;
        }
        match self.record.as_mut() {
            Some(record) => {
                record.result = Some(result);
                self.step = Step::Download;
                true
            }
            None => false,
        }
    }

    /// Start over: discard the record and return to the welcome screen.
    /// Valid from any step.
    pub fn reset(&mut self) {
        self.record = None;
        self.step = Step::Welcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ProjectDetails {
        ProjectDetails {
            project_name: "Oakwood Mall Renovation".to_string(),
            client_name: "Prime Properties Inc.".to_string(),
            date_range: "Week of August 18, 2025".to_string(),
            highlights: String::new(),
        }
    }

    fn images() -> Vec<EncodedImage> {
        vec![EncodedImage {
            filename: "site.jpg".to_string(),
            data: "aGVsbG8=".to_string(),
        }]
    }

    fn result() -> ProcessingResult {
        ProcessingResult {
            success: true,
            project_id: "demo-1".to_string(),
            presentation_filename: "Oakwood_Mall_Renovation_2025-08-18.pptx".to_string(),
            download_url: "https://example.com/file.pptx".to_string(),
            message: "Presentation generated successfully!".to_string(),
        }
    }

    #[test]
    fn test_happy_path_attaches_data_in_order() {
        let mut session = Session::new();
        assert_eq!(session.step(), Step::Welcome);
        assert!(session.record().is_none());

        assert!(session.submit_details(details()));
        assert_eq!(session.step(), Step::Upload);
        let record = session.record().unwrap();
        assert_eq!(record.details, details());
        assert!(record.images.is_none());
        assert!(record.result.is_none());

        assert!(session.images_ready(images()));
        assert_eq!(session.step(), Step::Processing);
        assert_eq!(session.record().unwrap().image_count(), 1);
        assert!(session.record().unwrap().result.is_none());

        assert!(session.processing_complete(result()));
        assert_eq!(session.step(), Step::Download);
        assert_eq!(session.record().unwrap().result, Some(result()));
    }

    #[test]
    fn test_out_of_order_transitions_are_refused() {
        let mut session = Session::new();

        // Nothing but submit_details is valid from Welcome
        assert!(!session.images_ready(images()));
        assert!(!session.processing_complete(result()));
        assert_eq!(session.step(), Step::Welcome);
        assert!(session.record().is_none());

        session.submit_details(details());

        // Re-submitting from Upload is refused, as is skipping ahead
        assert!(!session.submit_details(details()));
        assert!(!session.processing_complete(result()));
        assert_eq!(session.step(), Step::Upload);
        assert!(session.record().unwrap().images.is_none());
    }

    #[test]
    fn test_reset_discards_the_record_from_any_step() {
        let mut session = Session::new();
        session.submit_details(details());
        session.images_ready(images());
        session.processing_complete(result());
        assert_eq!(session.step(), Step::Download);

        session.reset();
        assert_eq!(session.step(), Step::Welcome);
        assert!(session.record().is_none());
    }

    #[test]
    fn test_result_present_only_on_download_step() {
        let mut session = Session::new();
        session.submit_details(details());
        session.images_ready(images());

        assert!(session.record().unwrap().result.is_none());
        session.processing_complete(result());
        assert!(session.record().unwrap().result.is_some());
        assert_eq!(session.step(), Step::Download);
    }
}
