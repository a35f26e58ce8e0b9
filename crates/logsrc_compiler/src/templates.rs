//! Built-in fluentd source stanzas.
//!
//! The text of each stanza is a compatibility contract with the collector
//! image and with golden tests. `#{...}` sequences are Ruby interpolations
//! evaluated by fluentd when it loads the file.

use crate::stanza::{ParserKind, StanzaDefinition};
use forwarding_spec::LogSourceType;
use std::borrow::Cow;

/// Node journal input.
pub const JOURNAL: &str = r##"#journal logs to gather node
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

/// Container log tail. The collector's own stack is excluded.
pub const CONTAINER: &str = r##"# container logs
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
"##;

/// Host auditd log tail.
pub const LINUX_AUDIT: &str = r##"# linux audit logs
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

/// Kubernetes API server audit log tail.
pub const K8S_AUDIT: &str = r##"# k8s audit logs
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

/// `OpenShift` API server audit log tail.
///
/// `pos_file` reads `OPENSHIFT_AUDIT_FILE`, not a `_POS_FILE` variable;
/// deployed collectors depend on that.
pub const OPENSHIFT_AUDIT: &str = r##"# Openshift audit logs
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

const INGRESS: &str = "@INGRESS";

/// The built-in table, already in rank order.
pub static BUILTIN: [StanzaDefinition; 5] = [
    StanzaDefinition {
        source_type: LogSourceType::Infra,
        rank: 10,
        id: Cow::Borrowed("systemd-input"),
        tag: Cow::Borrowed("journal"),
        label: Cow::Borrowed(INGRESS),
        parser: ParserKind::None,
        template: Cow::Borrowed(JOURNAL),
    },
    StanzaDefinition {
        source_type: LogSourceType::App,
        rank: 20,
        id: Cow::Borrowed("container-input"),
        tag: Cow::Borrowed("kubernetes.*"),
        label: Cow::Borrowed("@CONCAT"),
        parser: ParserKind::MultiFormat,
        template: Cow::Borrowed(CONTAINER),
    },
    StanzaDefinition {
        source_type: LogSourceType::Audit,
        rank: 30,
        id: Cow::Borrowed("audit-input"),
        tag: Cow::Borrowed("linux-audit.log"),
        label: Cow::Borrowed(INGRESS),
        parser: ParserKind::HostAudit,
        template: Cow::Borrowed(LINUX_AUDIT),
    },
    StanzaDefinition {
        source_type: LogSourceType::Audit,
        rank: 40,
        id: Cow::Borrowed("k8s-audit-input"),
        tag: Cow::Borrowed("k8s-audit.log"),
        label: Cow::Borrowed(INGRESS),
        parser: ParserKind::Json,
        template: Cow::Borrowed(K8S_AUDIT),
    },
    StanzaDefinition {
        source_type: LogSourceType::Audit,
        rank: 50,
        id: Cow::Borrowed("openshift-audit-input"),
        tag: Cow::Borrowed("openshift-audit.log"),
        label: Cow::Borrowed(INGRESS),
        parser: ParserKind::Json,
        template: Cow::Borrowed(OPENSHIFT_AUDIT),
    },
];
