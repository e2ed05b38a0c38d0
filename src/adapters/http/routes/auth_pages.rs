//! Auth screen bodies: login, registration and the standalone email
//! verification page. The step logic mirrors the machines in
//! [`crate::flows::auth`]; box counts and countdown lengths are injected
//! from [`crate::flows::otp`] so markup and model stay in sync. All
//! network calls go to the external auth API origin.

use crate::flows::otp::{CODE_LENGTH, RESEND_COOLDOWN_SECS, SHORT_CODE_LENGTH};

pub fn login_body(auth_api: &str) -> String {
    let mut out = String::with_capacity(8192);
    out.push_str("<div class=\"auth-card\">\n");
    out.push_str(
        r##"<div id="entry-step">
  <h1>Welcome back</h1>
  <p class="sub">Sign in to continue your celebrations</p>
  <form id="login-form">
    <label for="login-email">Email address</label>
    <input id="login-email" type="email" placeholder="you@example.com">
    <p id="entry-error" class="auth-error"></p>
    <button class="btn-primary" type="submit">Continue</button>
  </form>
  <p class="sub" style="margin-top:18px">New to Giftseon? <a class="linklike" href="/auth/register">Create an account</a></p>
</div>
"##,
    );
    out.push_str(&verify_step_html(CODE_LENGTH));
    out.push_str(&success_step_html("You're signed in. Time to celebrate!"));
    out.push_str("</div>\n");
    out.push_str(&auth_script(auth_api, CODE_LENGTH, LOGIN_ENTRY_SCRIPT));
    out
}

pub fn register_body(auth_api: &str) -> String {
    let mut out = String::with_capacity(8192);
    out.push_str("<div class=\"auth-card\">\n");
    out.push_str(
        r##"<div id="entry-step">
  <h1>Create your account</h1>
  <p class="sub">Start creating unforgettable celebrations</p>
  <form id="register-form">
    <label for="register-first">First name</label>
    <input id="register-first" type="text" placeholder="Ada">
    <label for="register-last">Last name</label>
    <input id="register-last" type="text" placeholder="Lovelace">
    <label for="register-email">Email address</label>
    <input id="register-email" type="email" placeholder="you@example.com">
    <p id="entry-error" class="auth-error"></p>
    <button class="btn-primary" type="submit">Create account</button>
  </form>
  <p class="sub" style="margin-top:18px">Already have an account? <a class="linklike" href="/auth/login">Sign in</a></p>
</div>
"##,
    );
    out.push_str(&verify_step_html(CODE_LENGTH));
    out.push_str(&success_step_html("Your account is ready. Welcome to Giftseon!"));
    out.push_str("</div>\n");
    out.push_str(&auth_script(auth_api, CODE_LENGTH, REGISTER_ENTRY_SCRIPT));
    out
}

pub fn verification_body() -> String {
    let mut out = String::with_capacity(8192);
    out.push_str("<div class=\"auth-card\">\n");
    out.push_str(
        r##"<div id="method-step">
  <h1>Verify your email</h1>
  <p class="sub">How would you like to verify <b>j*******e@example.com</b>?</p>
  <button class="method-card" type="button" data-method="otp">
    <span>🔢</span>
    <span><b>Enter a code</b><span>Type the one-time code we emailed you</span></span>
  </button>
  <button class="method-card" type="button" data-method="magic-link">
    <span>✉️</span>
    <span><b>Magic link</b><span>Open the sign-in link from your inbox</span></span>
  </button>
  <p id="method-error" class="auth-error"></p>
  <button id="method-continue" class="btn-primary" type="button" style="width:100%">Continue</button>
</div>
"##,
    );
    out.push_str(&format!(
        r##"<div id="code-step" hidden>
  <h1>Enter the code</h1>
  <p class="sub">We emailed you a {SHORT_CODE_LENGTH}-digit code</p>
  <form id="code-form">
    <div class="otp-row">
{boxes}    </div>
    <button class="btn-primary" type="submit" style="width:100%">Verify</button>
  </form>
  <button id="code-back" class="linklike" type="button" style="margin-top:14px">Choose another method</button>
</div>
"##,
        boxes = otp_boxes(SHORT_CODE_LENGTH),
    ));
    out.push_str(
        r##"<div id="link-step" hidden>
  <h1>Check your inbox</h1>
  <p class="sub">We sent a magic link to your email. Open it on this device to continue.</p>
  <p id="link-countdown" class="countdown"></p>
  <button id="link-resend" class="linklike" type="button" disabled>Resend link</button>
  <button id="link-use-code" class="linklike" type="button" style="display:block;margin:10px auto 0">Use a code instead</button>
  <button id="link-back" class="linklike" type="button" style="display:block;margin:10px auto 0">Choose another method</button>
</div>
"##,
    );
    out.push_str(&success_step_html("Your email is verified."));
    out.push_str("</div>\n");
    out.push_str(&verification_script());
    out
}

fn otp_boxes(count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        out.push_str(&format!(
            "      <input class=\"otp-box\" data-index=\"{i}\" maxlength=\"1\" inputmode=\"numeric\" autocomplete=\"one-time-code\">\n"
        ));
    }
    out
}

fn verify_step_html(code_len: usize) -> String {
    format!(
        r##"<div id="verify-step" hidden>
  <h1>Check your email</h1>
  <p class="sub">Enter the {code_len}-digit code we sent to <b id="verify-email"></b></p>
  <form id="verify-form">
    <div class="otp-row">
{boxes}    </div>
    <p id="verify-error" class="auth-error"></p>
    <button class="btn-primary" type="submit" style="width:100%">Verify</button>
  </form>
  <p id="countdown" class="countdown"></p>
  <button id="resend" class="linklike" type="button" disabled>Resend code</button>
  <button id="back-to-entry" class="linklike" type="button" style="display:block;margin:12px auto 0">Go back</button>
</div>
"##,
        boxes = otp_boxes(code_len),
    )
}

fn success_step_html(message: &str) -> String {
    format!(
        r##"<div id="success-step" hidden>
  <div class="success-icon">✓</div>
  <h1>All set</h1>
  <p class="sub">{message}</p>
  <a class="btn-primary" href="/" style="display:block">Proceed to Dashboard</a>
</div>
"##
    )
}

/// Assembles the page script: injected constants, the page-specific
/// entry-step handler (which must define `requestCode`), then the shared
/// verification-step logic.
fn auth_script(auth_api: &str, code_len: usize, entry_script: &str) -> String {
    let auth_api = auth_api.trim_end_matches('/');
    format!(
        "<script>\nvar AUTH_API={auth_api:?};\nvar CODE_LENGTH={code_len};\nvar RESEND_COOLDOWN_SECS={RESEND_COOLDOWN_SECS};\n(function(){{\n{entry_script}\n{VERIFY_SCRIPT}\n}})();\n</script>\n"
    )
}

const LOGIN_ENTRY_SCRIPT: &str = r##"
var email='';
document.getElementById('login-form').addEventListener('submit',function(e){
  e.preventDefault();
  var entryError=document.getElementById('entry-error');
  email=document.getElementById('login-email').value.trim();
  if(!email){entryError.textContent='Please enter your email address';return;}
  entryError.textContent='';
  requestCode()
    .then(function(r){if(!r.ok)throw new Error();enterVerifyStep();})
    .catch(function(){entryError.textContent='Login failed. Please try again.';});
});
function requestCode(){
  return fetch(AUTH_API+'/auth/login',{
    method:'POST',
    headers:{'Content-Type':'application/json'},
    body:JSON.stringify({email:email})
  });
}
"##;

const REGISTER_ENTRY_SCRIPT: &str = r##"
var email='';
document.getElementById('register-form').addEventListener('submit',function(e){
  e.preventDefault();
  var entryError=document.getElementById('entry-error');
  var first=document.getElementById('register-first').value.trim();
  var last=document.getElementById('register-last').value.trim();
  email=document.getElementById('register-email').value.trim();
  if(!first||!last||!email){entryError.textContent='Please fill in all fields';return;}
  entryError.textContent='';
  requestCode()
    .then(function(r){if(!r.ok)throw new Error();enterVerifyStep();})
    .catch(function(){entryError.textContent='Registration failed. Please try again.';});
});
function requestCode(){
  return fetch(AUTH_API+'/auth/register',{
    method:'POST',
    headers:{'Content-Type':'application/json'},
    body:JSON.stringify({
      firstName:document.getElementById('register-first').value.trim(),
      lastName:document.getElementById('register-last').value.trim(),
      email:email
    })
  });
}
"##;

/// Shared verification-step behaviour for login and registration:
/// digit boxes, resend cooldown, code submission and the back action.
const VERIFY_SCRIPT: &str = r##"
function show(id){
  ['entry-step','verify-step','success-step'].forEach(function(s){
    document.getElementById(s).hidden=(s!==id);
  });
}
var boxes=Array.prototype.slice.call(document.querySelectorAll('.otp-box'));
var verifyError=document.getElementById('verify-error');
var countdownEl=document.getElementById('countdown');
var resendBtn=document.getElementById('resend');
var remaining=RESEND_COOLDOWN_SECS;
var timer=null;
function renderCooldown(){
  countdownEl.textContent=remaining>0?('Resend code in '+remaining+'s'):'';
}
function startCooldown(){
  remaining=RESEND_COOLDOWN_SECS;
  resendBtn.disabled=true;
  renderCooldown();
  if(timer)clearInterval(timer);
  timer=setInterval(function(){
    remaining--;
    renderCooldown();
    if(remaining<=0){clearInterval(timer);resendBtn.disabled=false;}
  },1000);
}
function enterVerifyStep(){
  document.getElementById('verify-email').textContent=email;
  show('verify-step');
  startCooldown();
  boxes[0].focus();
}
boxes.forEach(function(box,i){
  box.addEventListener('input',function(){
    box.value=box.value.replace(/[^0-9]/g,'').slice(0,1);
    if(box.value&&i+1<boxes.length)boxes[i+1].focus();
  });
  box.addEventListener('keydown',function(e){
    if(e.key==='Backspace'&&!box.value&&i>0)boxes[i-1].focus();
  });
});
boxes[0].addEventListener('paste',function(e){
  e.preventDefault();
  var digits=(e.clipboardData.getData('text')||'').replace(/[^0-9]/g,'').slice(0,CODE_LENGTH);
  boxes.forEach(function(box,i){box.value=digits[i]||'';});
  boxes[Math.min(digits.length,CODE_LENGTH-1)].focus();
});
document.getElementById('verify-form').addEventListener('submit',function(e){
  e.preventDefault();
  var otp=boxes.map(function(b){return b.value;}).join('');
  if(otp.length<CODE_LENGTH)return;
  fetch(AUTH_API+'/auth/verify-otp',{
    method:'POST',
    headers:{'Content-Type':'application/json'},
    body:JSON.stringify({email:email,otp:otp})
  })
    .then(function(r){if(!r.ok)throw new Error();show('success-step');})
    .catch(function(){
      verifyError.textContent='Invalid code. Please try again.';
      boxes.forEach(function(b){b.value='';});
      boxes[0].focus();
    });
});
resendBtn.addEventListener('click',function(){
  if(resendBtn.disabled)return;
  requestCode().then(startCooldown).catch(function(){});
});
document.getElementById('back-to-entry').addEventListener('click',function(){
  boxes.forEach(function(b){b.value='';});
  verifyError.textContent='';
  show('entry-step');
});
"##;

fn verification_script() -> String {
    format!(
        "<script>\nvar SHORT_CODE_LENGTH={SHORT_CODE_LENGTH};\nvar RESEND_COOLDOWN_SECS={RESEND_COOLDOWN_SECS};\n{VERIFICATION_SCRIPT_BODY}"
    )
}

/// The standalone screen has no backing endpoint; code verification is
/// simulated, matching the demo behaviour of the original screen.
const VERIFICATION_SCRIPT_BODY: &str = r##"
(function(){
  var selected=null;
  function show(id){
    ['method-step','code-step','link-step','success-step'].forEach(function(s){
      document.getElementById(s).hidden=(s!==id);
    });
  }
  var cards=Array.prototype.slice.call(document.querySelectorAll('.method-card'));
  cards.forEach(function(card){
    card.addEventListener('click',function(){
      selected=card.getAttribute('data-method');
      cards.forEach(function(c){c.classList.toggle('selected',c===card);});
      document.getElementById('method-error').textContent='';
    });
  });
  document.getElementById('method-continue').addEventListener('click',function(){
    if(!selected){document.getElementById('method-error').textContent='Please choose a verification method';return;}
    if(selected==='otp'){enterCodeStep();}else{enterLinkStep();}
  });
  var boxes=Array.prototype.slice.call(document.querySelectorAll('.otp-box'));
  boxes.forEach(function(box,i){
    box.addEventListener('input',function(){
      box.value=box.value.replace(/[^0-9]/g,'').slice(0,1);
      if(box.value&&i+1<boxes.length)boxes[i+1].focus();
    });
    box.addEventListener('keydown',function(e){
      if(e.key==='Backspace'&&!box.value&&i>0)boxes[i-1].focus();
    });
  });
  function enterCodeStep(){
    boxes.forEach(function(b){b.value='';});
    show('code-step');
    boxes[0].focus();
  }
  document.getElementById('code-form').addEventListener('submit',function(e){
    e.preventDefault();
    var code=boxes.map(function(b){return b.value;}).join('');
    if(code.length<SHORT_CODE_LENGTH)return;
    setTimeout(function(){show('success-step');},1500);
  });
  var remaining=RESEND_COOLDOWN_SECS;
  var timer=null;
  var resendBtn=document.getElementById('link-resend');
  var countdownEl=document.getElementById('link-countdown');
  function enterLinkStep(){
    show('link-step');
    startCooldown();
  }
  function startCooldown(){
    remaining=RESEND_COOLDOWN_SECS;
    resendBtn.disabled=true;
    if(timer)clearInterval(timer);
    render();
    timer=setInterval(function(){
      remaining--;
      render();
      if(remaining<=0){clearInterval(timer);resendBtn.disabled=false;}
    },1000);
  }
  function render(){
    countdownEl.textContent=remaining>0?('Resend available in '+remaining+'s'):'';
  }
  resendBtn.addEventListener('click',function(){
    if(resendBtn.disabled)return;
    startCooldown();
  });
  document.getElementById('link-use-code').addEventListener('click',enterCodeStep);
  document.getElementById('link-back').addEventListener('click',function(){show('method-step');});
  document.getElementById('code-back').addEventListener('click',function(){show('method-step');});
})();
</script>
"##;
