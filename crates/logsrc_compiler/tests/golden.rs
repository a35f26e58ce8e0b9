//! Golden tests for the emitted source stanzas.
//!
//! The collector reads these stanzas verbatim, so the exact text is pinned by
//! snapshots. The `EXPECTED_*` texts are the reference stanzas as written in
//! the collector's own acceptance tests; those compare with whitespace
//! collapsed, so indentation differences are not significant there.

use forwarding_spec::{EnabledSources, LogSourceType};
use logsrc_compiler::Compiler;

const EXPECTED_CONTAINER: &str = r#"# container logs
		  <source>
			@type tail
			@id container-input
			path "/var/log/containers/*.log"
			exclude_path ["/var/log/containers/fluentd-*_openshift-logging_*.log", "/var/log/containers/elasticsearch-*_openshift-logging_*.log", "/var/log/containers/kibana-*_openshift-logging_*.log"]
			pos_file "/var/log/es-containers.log.pos"
			refresh_interval 5
			rotate_wait 5
			tag kubernetes.*
			read_from_head "true"
			@label @CONCAT
			<parse>
			  @type multi_format
			  <pattern>
				format json
				time_format '%Y-%m-%dT%H:%M:%S.%N%Z'
				keep_time_key true
			  </pattern>
			  <pattern>
				format regexp
				expression /^(?<time>.+) (?<stream>stdout|stderr)( (?<logtag>.))? (?<log>.*)$/
				time_format '%Y-%m-%dT%H:%M:%S.%N%:z'
				keep_time_key true
			  </pattern>
			</parse>
		  </source>
		  "#;

const EXPECTED_JOURNAL: &str = r##"
			#journal logs to gather node
			<source>
				@type systemd
				@id systemd-input
				@label @INGRESS
				path "#{if (val = ENV.fetch('JOURNAL_SOURCE','')) && (val.length > 0); val; else '/run/log/journal'; end}"
				<storage>
				@type local
				persistent true
				# NOTE: if this does not end in .json, fluentd will think it
				# is the name of a directory - see fluentd storage_local.rb
				path "#{ENV['JOURNAL_POS_FILE'] || '/var/log/journal_pos.json'}"
				</storage>
				matches "#{ENV['JOURNAL_FILTERS_JSON'] || '[]'}"
				tag journal
				read_from_head "#{if (val = ENV.fetch('JOURNAL_READ_FROM_HEAD','')) && (val.length > 0); val; else 'false'; end}"
			</source>
		  "##;

const EXPECTED_LINUX_AUDIT: &str = r##"
            # linux audit logs
            <source>
              @type tail
              @id audit-input
              @label @INGRESS
              path "#{ENV['AUDIT_FILE'] || '/var/log/audit/audit.log'}"
              pos_file "#{ENV['AUDIT_POS_FILE'] || '/var/log/audit/audit.log.pos'}"
              tag linux-audit.log
              <parse>
                @type viaq_host_audit
              </parse>
            </source>
		  "##;

const EXPECTED_K8S_AUDIT: &str = r##"
            # k8s audit logs
            <source>
              @type tail
              @id k8s-audit-input
              @label @INGRESS
              path "#{ENV['K8S_AUDIT_FILE'] || '/var/log/kube-apiserver/audit.log'}"
              pos_file "#{ENV['K8S_AUDIT_POS_FILE'] || '/var/log/kube-apiserver/audit.log.pos'}"
              tag k8s-audit.log
              <parse>
                @type json
                time_key requestReceivedTimestamp
                # In case folks want to parse based on the requestReceivedTimestamp key
                keep_time_key true
                time_format %Y-%m-%dT%H:%M:%S.%N%z
              </parse>
            </source>
		  "##;

const EXPECTED_OPENSHIFT_AUDIT: &str = r##"
            # Openshift audit logs
            <source>
              @type tail
              @id openshift-audit-input
              @label @INGRESS
              path "#{ENV['OPENSHIFT_AUDIT_FILE'] || '/var/log/openshift-apiserver/audit.log'}"
              pos_file "#{ENV['OPENSHIFT_AUDIT_FILE'] || '/var/log/openshift-apiserver/audit.log.pos'}"
              tag openshift-audit.log
              <parse>
                @type json
                time_key requestReceivedTimestamp
                # In case folks want to parse based on the requestReceivedTimestamp key
                keep_time_key true
                time_format %Y-%m-%dT%H:%M:%S.%N%z
              </parse>
            </source>
		  "##;

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn assert_equivalent(actual: &str, expected: &str) {
    assert_eq!(normalize(actual), normalize(expected));
}

fn compile(types: &[LogSourceType]) -> Vec<String> {
    let enabled: EnabledSources = types.iter().copied().collect();
    Compiler::new().compile(&enabled).unwrap()
}

#[test]
fn app_only_produces_container_config() {
    let results = compile(&[LogSourceType::App]);
    assert_eq!(results.len(), 1);
    assert_equivalent(&results[0], EXPECTED_CONTAINER);
}

#[test]
fn infra_only_produces_journal_config() {
    let results = compile(&[LogSourceType::Infra]);
    assert_eq!(results.len(), 1);
    assert_equivalent(&results[0], EXPECTED_JOURNAL);
}

#[test]
fn audit_only_produces_three_audit_configs() {
    let results = compile(&[LogSourceType::Audit]);
    assert_eq!(results.len(), 3);
    assert_equivalent(&results[0], EXPECTED_LINUX_AUDIT);
    assert_equivalent(&results[1], EXPECTED_K8S_AUDIT);
    assert_equivalent(&results[2], EXPECTED_OPENSHIFT_AUDIT);
}

#[test]
fn all_sources_produce_five_configs_in_order() {
    let results = compile(&[LogSourceType::App, LogSourceType::Infra, LogSourceType::Audit]);
    assert_eq!(results.len(), 5);
    assert_equivalent(&results[0], EXPECTED_JOURNAL);
    assert_equivalent(&results[1], EXPECTED_CONTAINER);
    assert_equivalent(&results[2], EXPECTED_LINUX_AUDIT);
    assert_equivalent(&results[3], EXPECTED_K8S_AUDIT);
    assert_equivalent(&results[4], EXPECTED_OPENSHIFT_AUDIT);
}

#[test]
fn construction_order_is_irrelevant() {
    assert_eq!(
        compile(&[LogSourceType::App, LogSourceType::Infra]),
        compile(&[LogSourceType::Infra, LogSourceType::App])
    );
}

#[test]
fn stanzas_match_snapshots() {
    let results = compile(&[LogSourceType::App, LogSourceType::Infra, LogSourceType::Audit]);

    insta::assert_snapshot!("journal", results[0]);
    insta::assert_snapshot!("container", results[1]);
    insta::assert_snapshot!("linux_audit", results[2]);
    insta::assert_snapshot!("k8s_audit", results[3]);
    insta::assert_snapshot!("openshift_audit", results[4]);
}
