//! Built-in email templates
//!
//! Used when an event has no template override in its notification
//! settings. Marker kinds are the ones the renderer understands:
//! `{{KEY}}`, `{{#if KEY}}...{{/if}}` and `{{#each KEY}}...{{/each}}`.

pub const SESSION_REMINDER_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<body style="margin:0;padding:0;background-color:#f4f4f7;font-family:Arial,Helvetica,sans-serif;">
  <div style="max-width:600px;margin:0 auto;padding:24px;background-color:#ffffff;">
    <h2 style="color:#1a1a2e;">Hi {{ATTENDEE_NAME}},</h2>
    <p>Your next sessions at <strong>{{EVENT_NAME}}</strong> start in about {{LEAD_MINUTES}} minutes:</p>
    {{#each SESSIONS}}
    <div style="border:1px solid #e0e0e6;border-radius:6px;padding:16px;margin-bottom:12px;">
      <h3 style="margin:0 0 8px 0;">{{this.name}}</h3>
      <p style="margin:4px 0;">{{this.date}}, {{this.start_time}} &ndash; {{this.end_time}} ({{this.duration}})</p>
      {{#if this.location}}<p style="margin:4px 0;">Location: {{this.location}}</p>{{/if}}
      {{#if this.speaker}}<p style="margin:4px 0;">Speaker: {{this.speaker}}</p>{{/if}}
      {{#if this.booth}}<p style="margin:4px 0;">Meeting point: booth {{this.booth}}</p>{{/if}}
      {{#if this.description}}<p style="margin:8px 0;color:#555566;">{{this.description}}</p>{{/if}}
      <a href="{{this.calendar_link}}" style="color:#3b5bdb;">Add to calendar</a>
    </div>
    {{/each}}
    <p><a href="{{PORTAL_URL}}" style="color:#3b5bdb;">Open your attendee portal</a></p>
    {{#if PLATINUM_SPONSOR}}
    <div style="text-align:center;padding:16px 0;border-top:1px solid #e0e0e6;">
      <p style="color:#888899;font-size:12px;margin-bottom:8px;">Presented by our platinum sponsor</p>
      <a href="{{PLATINUM_SPONSOR.website_url}}"><img src="{{PLATINUM_SPONSOR.logo_url}}" alt="{{PLATINUM_SPONSOR.name}}" style="max-height:48px;"></a>
    </div>
    {{/if}}
    {{#if HAS_GOLD}}
    <div style="text-align:center;padding:8px 0;">
      <p style="color:#888899;font-size:12px;margin-bottom:8px;">Gold sponsors</p>
      {{#each GOLD_SPONSORS}}<a href="{{this.website_url}}"><img src="{{this.logo_url}}" alt="{{this.name}}" style="max-height:32px;margin:0 6px;"></a>{{/each}}
    </div>
    {{/if}}
    {{#if HAS_SILVER}}
    <div style="text-align:center;padding:8px 0;">
      <p style="color:#888899;font-size:12px;margin-bottom:8px;">Silver sponsors</p>
      {{#each SILVER_SPONSORS}}<a href="{{this.website_url}}"><img src="{{this.logo_url}}" alt="{{this.name}}" style="max-height:24px;margin:0 6px;"></a>{{/each}}
    </div>
    {{/if}}
  </div>
</body>
</html>"#;

pub const DAILY_DIGEST_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<body style="margin:0;padding:0;background-color:#f4f4f7;font-family:Arial,Helvetica,sans-serif;">
  <div style="max-width:600px;margin:0 auto;padding:24px;background-color:#ffffff;">
    <h2 style="color:#1a1a2e;">Hi {{ATTENDEE_NAME}},</h2>
    <p>Here is your agenda for <strong>{{DIGEST_DATE}}</strong> at {{EVENT_NAME}}:</p>
    {{#each SESSIONS}}
    <div style="border-left:3px solid #3b5bdb;padding:8px 16px;margin-bottom:12px;">
      <h3 style="margin:0 0 4px 0;">{{this.name}}</h3>
      <p style="margin:4px 0;">{{this.start_time}} &ndash; {{this.end_time}} ({{this.duration}})</p>
      {{#if this.location}}<p style="margin:4px 0;">Location: {{this.location}}</p>{{/if}}
      {{#if this.speaker}}<p style="margin:4px 0;">Speaker: {{this.speaker}}</p>{{/if}}
      {{#if this.booth}}<p style="margin:4px 0;">Meeting point: booth {{this.booth}}</p>{{/if}}
      <a href="{{this.calendar_link}}" style="color:#3b5bdb;">Add to calendar</a>
    </div>
    {{/each}}
    <p><a href="{{PORTAL_URL}}" style="color:#3b5bdb;">See the full schedule in your portal</a></p>
    {{#if PLATINUM_SPONSOR}}
    <div style="text-align:center;padding:16px 0;border-top:1px solid #e0e0e6;">
      <p style="color:#888899;font-size:12px;margin-bottom:8px;">Presented by our platinum sponsor</p>
      <a href="{{PLATINUM_SPONSOR.website_url}}"><img src="{{PLATINUM_SPONSOR.logo_url}}" alt="{{PLATINUM_SPONSOR.name}}" style="max-height:48px;"></a>
    </div>
    {{/if}}
    {{#if HAS_GOLD}}
    <div style="text-align:center;padding:8px 0;">
      <p style="color:#888899;font-size:12px;margin-bottom:8px;">Gold sponsors</p>
      {{#each GOLD_SPONSORS}}<a href="{{this.website_url}}"><img src="{{this.logo_url}}" alt="{{this.name}}" style="max-height:32px;margin:0 6px;"></a>{{/each}}
    </div>
    {{/if}}
    {{#if HAS_SILVER}}
    <div style="text-align:center;padding:8px 0;">
      <p style="color:#888899;font-size:12px;margin-bottom:8px;">Silver sponsors</p>
      {{#each SILVER_SPONSORS}}<a href="{{this.website_url}}"><img src="{{this.logo_url}}" alt="{{this.name}}" style="max-height:24px;margin:0 6px;"></a>{{/each}}
    </div>
    {{/if}}
  </div>
</body>
</html>"#;
