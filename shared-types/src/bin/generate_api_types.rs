use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Project types
    types.push(clean_type(Category::export_to_string()?));
    types.push(clean_type(InvestmentStatus::export_to_string()?));
    types.push(clean_type(TeamMember::export_to_string()?));
    types.push(clean_type(ProjectRecord::export_to_string()?));
    types.push(clean_type(StatusPresentation::export_to_string()?));

    // Listing types
    types.push(clean_type(ProjectCard::export_to_string()?));
    types.push(clean_type(ListingOutcome::export_to_string()?));
    types.push(clean_type(ListProjectsRequest::export_to_string()?));
    types.push(clean_type(ProjectsResponse::export_to_string()?));
    types.push(clean_type(FilterOption::export_to_string()?));
    types.push(clean_type(FilterOptionsResponse::export_to_string()?));

    // Detail types
    types.push(clean_type(TeamMemberView::export_to_string()?));
    types.push(clean_type(InvestmentOpportunity::export_to_string()?));
    types.push(clean_type(ProjectDetail::export_to_string()?));

    // Submission types
    types.push(clean_type(ProjectSubmission::export_to_string()?));
    types.push(clean_type(SubmissionReceipt::export_to_string()?));
    types.push(clean_type(SubmissionRejected::export_to_string()?));

    // Dashboard types
    types.push(clean_type(DashboardStats::export_to_string()?));
    types.push(clean_type(RecentProject::export_to_string()?));
    types.push(clean_type(SdgAlignment::export_to_string()?));
    types.push(clean_type(DashboardResponse::export_to_string()?));

    // Landing types
    types.push(clean_type(NavLink::export_to_string()?));
    types.push(clean_type(Feature::export_to_string()?));
    types.push(clean_type(LandingResponse::export_to_string()?));

    let output_dir = Path::new("../gui/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // Check if the type definition includes imports (like ProjectRecord which imports TeamMember)
    let lines: Vec<&str> = type_def.lines().collect();
    let has_import = lines
        .iter()
        .any(|line| line.trim().starts_with("import type"));

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            // Keep import lines if they're part of a type definition (ProjectCard imports StatusPresentation)
            if trimmed.starts_with("import type") {
                return has_import;
            }
            // Filter out the generated comment line
            !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .cloned()
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
