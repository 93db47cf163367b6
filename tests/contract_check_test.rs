//! End-to-end checks of the contractmap binary: report format on stdout and
//! strict-mode exit-code gating, run against fixture repos in the
//! conventional frontend/backend layout.

use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Fixture repo with two unmapped frontend calls (GET /users and
/// POST /stations/{var}/commands).
fn repo_with_missing_mappings() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write_file(
        root,
        "frontend/src/services/station.ts",
        indoc! {r#"
            import request from '../utils/request';

            export const queryStations = () => request.get('/stations');
            export const queryStationStatus = (id: string) => request.get(`/stations/${id}/status`);
            export const executeCommand = (id: string, data: CommandParams) =>
              request.post(`/stations/${id}/commands`, data);
            export const removeStation = (id: string) => request.delete(`/stations/${id}`);
        "#},
    );
    write_file(
        root,
        "frontend/src/services/user.ts",
        indoc! {r#"
            import request from '../utils/request';

            export const queryUsers = () => request.get('/users');
            export const createUser = (data: Partial<User>) => request.post('/users', data);
        "#},
    );

    write_file(
        root,
        "server/src/main/java/com/acme/station/resource/StationResource.java",
        indoc! {r#"
            package com.acme.station.resource;

            @Path("/stations")
            @Produces(MediaType.APPLICATION_JSON)
            public class StationResource {

                @GET
                public List<StationRecord> list() {
                    return stationService.list();
                }

                @GET
                @Path("/{id}/status")
                public StationStatus status(@PathParam("id") UUID id) {
                    return stationService.status(id);
                }

                @DELETE
                @Path("/{id}")
                public Response delete(@PathParam("id") UUID id) {
                    stationService.delete(id);
                    return Response.noContent().build();
                }
            }
        "#},
    );
    write_file(
        root,
        "server/src/main/java/com/acme/auth/resource/UserResource.java",
        indoc! {r#"
            package com.acme.auth.resource;

            @Path("/users")
            public class UserResource {

                @POST
                public Response create(@Valid UserRecord.Create dto) {
                    return Response.status(Response.Status.CREATED).build();
                }
            }
        "#},
    );

    temp
}

/// Fixture repo where every frontend call has a backend route.
fn repo_fully_mapped() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write_file(
        root,
        "frontend/src/services/station.ts",
        indoc! {r#"
            export const queryStations = () => request.get('/stations');
            export const removeStation = (id: string) => request.delete(`/stations/${id}`);
        "#},
    );
    write_file(
        root,
        "server/src/main/java/com/acme/station/resource/StationResource.java",
        indoc! {r#"
            @Path("/stations")
            public class StationResource {

                @GET
                public List<StationRecord> list() {
                    return stationService.list();
                }

                @DELETE
                @Path("/{id}")
                public Response delete(@PathParam("id") UUID id) {
                    return Response.noContent().build();
                }
            }
        "#},
    );

    temp
}

fn contractmap() -> Command {
    Command::cargo_bin("contractmap").unwrap()
}

#[test]
fn test_report_lists_missing_mappings_sorted() {
    let repo = repo_with_missing_mappings();

    contractmap()
        .arg("--repo")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(indoc! {"
            Frontend endpoints: 6
            Backend endpoints: 4
            Missing mappings: 2
            MISSING GET /users from frontend/src/services/user.ts
            MISSING POST /stations/{var}/commands from frontend/src/services/station.ts
        "});
}

#[test]
fn test_missing_mappings_exit_zero_without_strict() {
    let repo = repo_with_missing_mappings();

    contractmap()
        .arg("--repo")
        .arg(repo.path())
        .assert()
        .success();
}

#[test]
fn test_missing_mappings_exit_one_with_strict() {
    let repo = repo_with_missing_mappings();

    contractmap()
        .arg("--repo")
        .arg(repo.path())
        .arg("--strict")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_fully_mapped_repo_exits_zero_in_both_modes() {
    let repo = repo_fully_mapped();

    contractmap()
        .arg("--repo")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(indoc! {"
            Frontend endpoints: 2
            Backend endpoints: 2
            Missing mappings: 0
        "});

    contractmap()
        .arg("--repo")
        .arg(repo.path())
        .arg("--strict")
        .assert()
        .success();
}

#[test]
fn test_repo_without_conventional_dirs_reports_empty_sets() {
    let repo = TempDir::new().unwrap();

    contractmap()
        .arg("--repo")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(indoc! {"
            Frontend endpoints: 0
            Backend endpoints: 0
            Missing mappings: 0
        "});
}

#[test]
fn test_json_format_output() {
    let repo = repo_with_missing_mappings();

    let output = contractmap()
        .arg("--repo")
        .arg(repo.path())
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["frontend_endpoints"], 6);
    assert_eq!(report["backend_endpoints"], 4);
    assert_eq!(report["missing"].as_array().unwrap().len(), 2);
    assert_eq!(report["missing"][0]["method"], "GET");
    assert_eq!(report["missing"][0]["path"], "/users");
}

#[test]
fn test_config_file_overrides_directories() {
    let repo = TempDir::new().unwrap();
    let root = repo.path();

    write_file(root, "contractmap.toml", "frontend_dir = \"web/api\"\n");
    write_file(
        root,
        "web/api/infra.ts",
        "export const ping = () => request.get('/infra/ping');\n",
    );

    contractmap()
        .arg("--repo")
        .arg(root)
        .assert()
        .success()
        .stdout(indoc! {"
            Frontend endpoints: 1
            Backend endpoints: 0
            Missing mappings: 1
            MISSING GET /infra/ping from web/api/infra.ts
        "});
}
